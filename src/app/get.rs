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

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use maud::Markup;
use maud::html;

use crate::app::load::load_new_joke;
use crate::app::state::ServerState;
use crate::app::template::page_template;
use crate::jokes::Jokes;

pub async fn get_handler(State(state): State<ServerState>) -> (StatusCode, Html<String>) {
    // The first time the screen is shown, fetch a joke before rendering.
    if !state.appeared.swap(true, Ordering::SeqCst) {
        let outcome = load_new_joke(&state.client, &state.mutable).await;
        log::debug!("Tried to load the first joke: {outcome:?}");
    }
    let jokes = state.mutable.lock().unwrap();
    let html = page_template(render(&jokes));
    (StatusCode::OK, Html(html.into_string()))
}

pub fn render(jokes: &Jokes) -> Markup {
    let favourite_class = if jokes.is_current_favourite() {
        "favourite favourited"
    } else {
        "favourite"
    };
    html! {
        div.root {
            h1 { "icanhazdadjoke?" }
            div.joke {
                (jokes.current().text())
            }
            form.controls action="/" method="post" {
                button id="favourite" class=(favourite_class) type="submit" name="action" value="Favourite" title="Add to favourites" {
                    "\u{2665}"
                }
                button id="another" type="submit" name="action" value="Another" {
                    "Another one!"
                }
            }
            div.favourites {
                h2 { "Favourites" }
                ul {
                    @for joke in jokes.favourites() {
                        li { (joke.text()) }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::joke::Joke;

    fn joke(id: &str, text: &str) -> Joke {
        Joke::new(id, text, 200)
    }

    #[test]
    fn test_render_initial() {
        let html = render(&Jokes::new()).into_string();
        assert!(html.contains("<div class=\"joke\">Knock, knock...</div>"));
        assert!(html.contains("class=\"favourite\""));
        assert!(!html.contains("favourited"));
        assert!(!html.contains("<li>"));
    }

    #[test]
    fn test_render_favourites_in_order() {
        let mut jokes = Jokes::new();
        jokes.replace_current(joke("1", "foo"));
        jokes.add_current_to_favourites();
        jokes.replace_current(joke("2", "bar"));
        jokes.add_current_to_favourites();
        let html = render(&jokes).into_string();
        assert!(html.contains("<ul><li>foo</li><li>bar</li></ul>"));
        assert!(html.contains("class=\"favourite favourited\""));
    }

    #[test]
    fn test_render_escapes_joke_text() {
        let mut jokes = Jokes::new();
        jokes.replace_current(joke("1", "<b>bold</b> & brash"));
        let html = render(&jokes).into_string();
        assert!(html.contains("&lt;b&gt;bold&lt;/b&gt; &amp; brash"));
        assert!(!html.contains("<b>bold</b>"));
    }
}
