use thiserror::Error;

/// A single entry read from the parameter store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub value: String,
}

impl Parameter {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub path: String,
    pub recursive: bool,
    pub next_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterPage {
    pub parameters: Vec<Parameter>,
    pub next_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParameterStoreError {
    #[error("parameter store request failed: {message}")]
    Request { message: String },

    #[error("parameter store returned the continuation token it was given: {token}")]
    RepeatedToken { token: String },
}

impl ParameterStoreError {
    pub fn request(message: impl Into<String>) -> Self {
        Self::Request {
            message: message.into(),
        }
    }
}

/// Fetches one page of parameters per call.
pub trait ParameterStore {
    fn fetch_page(&self, request: &PageRequest) -> Result<ParameterPage, ParameterStoreError>;
}

enum Cursor {
    Start,
    Next(String),
    Done,
}

/// Lazy, non-recursive page sequence over a single namespace path.
///
/// Each call to `next` performs one store round-trip. The iterator is fused
/// after the last page or after the first error, so a consumer that stops on
/// `Err` never triggers another request.
pub struct ParameterPages<'a, S: ParameterStore + ?Sized> {
    store: &'a S,
    path: &'a str,
    cursor: Cursor,
}

impl<'a, S: ParameterStore + ?Sized> ParameterPages<'a, S> {
    pub fn new(store: &'a S, path: &'a str) -> Self {
        Self {
            store,
            path,
            cursor: Cursor::Start,
        }
    }
}

impl<S: ParameterStore + ?Sized> Iterator for ParameterPages<'_, S> {
    type Item = Result<Vec<Parameter>, ParameterStoreError>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = match std::mem::replace(&mut self.cursor, Cursor::Done) {
            Cursor::Done => return None,
            Cursor::Start => None,
            Cursor::Next(token) => Some(token),
        };

        let request = PageRequest {
            path: self.path.to_string(),
            recursive: false,
            next_token: token,
        };

        let page = match self.store.fetch_page(&request) {
            Ok(page) => page,
            Err(error) => return Some(Err(error)),
        };

        match page.next_token.filter(|next| !next.is_empty()) {
            Some(next) if request.next_token.as_deref() == Some(next.as_str()) => {
                return Some(Err(ParameterStoreError::RepeatedToken { token: next }));
            }
            Some(next) => self.cursor = Cursor::Next(next),
            None => {}
        }

        Some(Ok(page.parameters))
    }
}
