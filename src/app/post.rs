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

use std::sync::atomic::Ordering;

use axum::Form;
use axum::extract::State;
use axum::response::Redirect;
use serde::Deserialize;

use crate::app::load::load_new_joke;
use crate::app::state::ServerState;

#[derive(Debug, Deserialize)]
enum Action {
    Favourite,
    Another,
}

#[derive(Deserialize)]
pub struct FormData {
    action: Action,
}

pub async fn post_handler(
    State(state): State<ServerState>,
    Form(form): Form<FormData>,
) -> Redirect {
    match form.action {
        Action::Favourite => favourite(&state),
        Action::Another => {
            state.appeared.store(true, Ordering::SeqCst);
            load_new_joke(&state.client, &state.mutable).await;
        }
    }
    Redirect::to("/")
}

fn favourite(state: &ServerState) {
    let mut jokes = state.mutable.lock().unwrap();
    if jokes.add_current_to_favourites() {
        log::debug!("Added joke {:?} to favourites", jokes.current().id());
    } else {
        log::debug!("Joke {:?} is already a favourite", jokes.current().id());
    }
}
