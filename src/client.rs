// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use reqwest::Client;
use reqwest::Url;
use reqwest::header::ACCEPT;

use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::error::fail;
use crate::types::joke::Joke;

/// Where jokes come from.
pub const JOKE_ENDPOINT: &str = "https://icanhazdadjoke.com/";

/// The endpoint asks API consumers to identify themselves.
const USER_AGENT: &str = concat!(
    env!("CARGO_PKG_NAME"),
    "/",
    env!("CARGO_PKG_VERSION")
);

/// Fetches random jokes from the joke endpoint.
#[derive(Clone)]
pub struct JokeClient {
    client: Client,
    endpoint: Url,
}

impl JokeClient {
    pub fn new() -> Fallible<Self> {
        Self::with_endpoint(JOKE_ENDPOINT)
    }

    pub fn with_endpoint(endpoint: &str) -> Fallible<Self> {
        let endpoint = Url::parse(endpoint).map_err(|e| {
            ErrorReport::new(&format!("invalid joke endpoint {endpoint:?}: {e}"))
        })?;
        match endpoint.scheme() {
            "http" | "https" => {}
            _ => return fail("the joke endpoint must be an http or https URL."),
        }
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    /// Makes a single request for a random joke. Connection errors, non-2xx
    /// responses, and bodies that don't decode to a joke all fail the same
    /// way. There is no retry.
    pub async fn fetch_random_joke(&self) -> Fallible<Joke> {
        log::debug!("GET {}", self.endpoint);
        let response = self
            .client
            .get(self.endpoint.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await?
            .error_for_status()?;
        let body = response.bytes().await?;
        let joke: Joke = serde_json::from_slice(&body)?;
        log::debug!("Fetched joke {} (status {})", joke.id(), joke.status());
        Ok(joke)
    }
}
