use aws_sdk_ssm::operation::get_parameters_by_path::GetParametersByPathOutput;

use crate::adapters::parameter_store::{Parameter, ParameterPage};

/// Converts one `GetParametersByPath` response into a page.
///
/// Entries without both a name and a value are skipped.
pub fn page_from_output(output: GetParametersByPathOutput) -> ParameterPage {
    let parameters = output
        .parameters()
        .iter()
        .filter_map(|parameter| Some(Parameter::new(parameter.name()?, parameter.value()?)))
        .collect();

    ParameterPage {
        parameters,
        next_token: output.next_token().map(str::to_string),
    }
}
