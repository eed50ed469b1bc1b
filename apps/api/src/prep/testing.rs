//! Recording fake gateways shared by the prep and route tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::gateway::{CompletionGateway, SearchGateway};
use crate::llm_client::LlmError;
use crate::search_client::{SearchError, SearchHit};

/// Completion fake: answers from a queue, records every prompt it receives.
/// An exhausted queue answers with `"generated #n"`.
#[derive(Default)]
pub struct FakeCompletion {
    pub calls: Mutex<Vec<(String, u32)>>,
    replies: Mutex<VecDeque<Result<String, LlmError>>>,
}

impl FakeCompletion {
    pub fn with_replies(replies: Vec<Result<String, LlmError>>) -> Self {
        Self {
            calls: Mutex::default(),
            replies: Mutex::new(replies.into()),
        }
    }

    pub fn failing_first() -> Self {
        Self::with_replies(vec![Err(LlmError::Api {
            status: 503,
            message: "overloaded".to_string(),
        })])
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn prompt(&self, index: usize) -> String {
        self.calls.lock().unwrap()[index].0.clone()
    }

    pub fn max_tokens(&self) -> Vec<u32> {
        self.calls.lock().unwrap().iter().map(|(_, t)| *t).collect()
    }
}

#[async_trait]
impl CompletionGateway for FakeCompletion {
    async fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String, LlmError> {
        let n = {
            let mut calls = self.calls.lock().unwrap();
            calls.push((prompt.to_string(), max_tokens));
            calls.len()
        };
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(format!("generated #{n}")))
    }
}

/// Search fake: fixed hits or a fixed upstream status failure.
pub struct FakeSearch {
    pub queries: Mutex<Vec<String>>,
    outcome: Result<Vec<SearchHit>, u16>,
}

impl FakeSearch {
    pub fn hits(hits: &[(&str, &str)]) -> Self {
        Self {
            queries: Mutex::default(),
            outcome: Ok(hits
                .iter()
                .map(|(t, s)| SearchHit {
                    title: t.to_string(),
                    snippet: s.to_string(),
                })
                .collect()),
        }
    }

    pub fn empty() -> Self {
        Self::hits(&[])
    }

    pub fn failing(status: u16) -> Self {
        Self {
            queries: Mutex::default(),
            outcome: Err(status),
        }
    }

    pub fn call_count(&self) -> usize {
        self.queries.lock().unwrap().len()
    }
}

#[async_trait]
impl SearchGateway for FakeSearch {
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, SearchError> {
        self.queries.lock().unwrap().push(query.to_string());
        match &self.outcome {
            Ok(hits) => Ok(hits.clone()),
            Err(status) => Err(SearchError::Api {
                status: *status,
                message: "search backend failed".to_string(),
            }),
        }
    }
}
