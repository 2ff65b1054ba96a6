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

use std::sync::Mutex;

use crate::client::JokeClient;
use crate::jokes::Jokes;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LoadOutcome {
    Loaded,
    Failed,
}

/// Fetches a new joke and puts it on display. On failure, the error is
/// logged and the state is left as it was.
///
/// The lock is only taken once the fetch has completed. Overlapping loads are
/// not serialized: whichever finishes last wins.
pub async fn load_new_joke(client: &JokeClient, jokes: &Mutex<Jokes>) -> LoadOutcome {
    match client.fetch_random_joke().await {
        Ok(joke) => {
            let mut jokes = jokes.lock().unwrap();
            jokes.replace_current(joke);
            LoadOutcome::Loaded
        }
        Err(e) => {
            log::error!("Could not retrieve or decode the joke from the endpoint: {e}");
            LoadOutcome::Failed
        }
    }
}
