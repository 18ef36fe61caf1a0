use aws_sdk_ssm::error::DisplayErrorContext;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use toggles_contract::events::{HttpRequestEvent, HttpResponseEvent};
use toggles_lambda::adapters::parameter_store::{
    PageRequest, ParameterPage, ParameterStore, ParameterStoreError,
};
use toggles_lambda::adapters::ssm::page_from_output;
use toggles_lambda::config::ToggleHandlerConfig;
use toggles_lambda::handlers::toggles::get_toggles;
use tracing_subscriber::EnvFilter;

struct SsmParameterStore {
    ssm_client: aws_sdk_ssm::Client,
}

impl ParameterStore for SsmParameterStore {
    fn fetch_page(&self, request: &PageRequest) -> Result<ParameterPage, ParameterStoreError> {
        let client = self.ssm_client.clone();
        let path = request.path.clone();
        let recursive = request.recursive;
        let next_token = request.next_token.clone();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                client
                    .get_parameters_by_path()
                    .path(path)
                    .recursive(recursive)
                    .set_next_token(next_token)
                    .send()
                    .await
                    .map(page_from_output)
                    .map_err(|error| {
                        ParameterStoreError::request(format!(
                            "failed to get parameters by path: {}",
                            DisplayErrorContext(&error)
                        ))
                    })
            })
        })
    }
}

async fn handle_request(
    event: LambdaEvent<HttpRequestEvent>,
    store: &SsmParameterStore,
    config: &ToggleHandlerConfig,
) -> Result<HttpResponseEvent, Error> {
    Ok(get_toggles(&event.payload, store, config))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        // CloudWatch adds the ingestion time and the function name.
        .with_target(false)
        .without_time()
        .init();

    let config = ToggleHandlerConfig::default();
    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let store = SsmParameterStore {
        ssm_client: aws_sdk_ssm::Client::new(&aws_config),
    };

    let store = &store;
    let config = &config;
    lambda_runtime::run(service_fn(move |event: LambdaEvent<HttpRequestEvent>| async move {
        handle_request(event, store, config).await
    }))
    .await
}
