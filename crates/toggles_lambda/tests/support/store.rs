#![allow(dead_code)]

use std::cell::RefCell;

use toggles_lambda::adapters::parameter_store::{
    PageRequest, Parameter, ParameterPage, ParameterStore, ParameterStoreError,
};

/// In-memory hierarchy that pages like the real service.
///
/// Continuation tokens are stringified offsets into the matching entries.
pub struct InMemoryParameterStore {
    entries: Vec<Parameter>,
    page_size: usize,
    fail_on_request: Option<usize>,
    ignore_recursive_flag: bool,
    requests: RefCell<Vec<PageRequest>>,
}

impl InMemoryParameterStore {
    pub fn new(entries: &[(&str, &str)], page_size: usize) -> Self {
        Self {
            entries: entries
                .iter()
                .map(|(name, value)| Parameter::new(*name, *value))
                .collect(),
            page_size: page_size.max(1),
            fail_on_request: None,
            ignore_recursive_flag: false,
            requests: RefCell::new(Vec::new()),
        }
    }

    /// Fails the request with the given zero-based index.
    pub fn failing_on_request(mut self, index: usize) -> Self {
        self.fail_on_request = Some(index);
        self
    }

    /// Returns nested entries even for non-recursive requests.
    pub fn ignoring_recursive_flag(mut self) -> Self {
        self.ignore_recursive_flag = true;
        self
    }

    pub fn requests(&self) -> Vec<PageRequest> {
        self.requests.borrow().clone()
    }

    fn matching(&self, request: &PageRequest) -> Vec<&Parameter> {
        self.entries
            .iter()
            .filter(|parameter| match parameter.name.strip_prefix(&request.path) {
                Some(leaf) if request.recursive || self.ignore_recursive_flag => !leaf.is_empty(),
                Some(leaf) => !leaf.is_empty() && !leaf.contains('/'),
                None => false,
            })
            .collect()
    }
}

impl ParameterStore for InMemoryParameterStore {
    fn fetch_page(&self, request: &PageRequest) -> Result<ParameterPage, ParameterStoreError> {
        let index = {
            let mut requests = self.requests.borrow_mut();
            requests.push(request.clone());
            requests.len() - 1
        };

        if self.fail_on_request == Some(index) {
            return Err(ParameterStoreError::request(
                "ThrottlingException: Rate exceeded",
            ));
        }

        let offset = match request.next_token.as_deref() {
            Some(token) => token
                .parse::<usize>()
                .map_err(|_| ParameterStoreError::request("ValidationException: invalid token"))?,
            None => 0,
        };

        let matching = self.matching(request);
        let end = (offset + self.page_size).min(matching.len());
        let parameters = matching
            .get(offset..end)
            .unwrap_or_default()
            .iter()
            .map(|parameter| (*parameter).clone())
            .collect();

        Ok(ParameterPage {
            parameters,
            next_token: (end < matching.len()).then(|| end.to_string()),
        })
    }
}
