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

use serde::Deserialize;
use serde::Serialize;

/// The text shown before the first joke arrives.
const PLACEHOLDER_TEXT: &str = "Knock, knock...";

/// A joke, as returned by the joke endpoint. Jokes are never modified after
/// they are decoded.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Joke {
    /// Opaque identifier assigned by the endpoint.
    id: String,
    /// The text of the joke.
    joke: String,
    /// The status code echoed in the response body.
    status: i64,
}

impl Joke {
    #[cfg(test)]
    pub fn new(id: &str, joke: &str, status: i64) -> Self {
        Self {
            id: id.to_string(),
            joke: joke.to_string(),
            status,
        }
    }

    pub fn placeholder() -> Self {
        Self {
            id: String::new(),
            joke: PLACEHOLDER_TEXT.to_string(),
            status: 0,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.joke
    }

    pub fn status(&self) -> i64 {
        self.status
    }
}
