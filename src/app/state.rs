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

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::AtomicBool;

use crate::client::JokeClient;
use crate::jokes::Jokes;

#[derive(Clone)]
pub struct ServerState {
    pub client: JokeClient,
    /// Set once the screen has been shown for the first time.
    pub appeared: Arc<AtomicBool>,
    pub mutable: Arc<Mutex<Jokes>>,
}

impl ServerState {
    pub fn new(client: JokeClient) -> Self {
        Self {
            client,
            appeared: Arc::new(AtomicBool::new(false)),
            mutable: Arc::new(Mutex::new(Jokes::new())),
        }
    }
}
