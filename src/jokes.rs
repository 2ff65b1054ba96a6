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

use crate::types::joke::Joke;

/// The session state of the joke screen: the joke on display, the jokes the
/// user has favourited, and whether the joke on display has already been
/// favourited. All changes go through the methods below.
pub struct Jokes {
    /// The joke currently on display.
    current: Joke,
    /// Favourited jokes, in the order they were added. May hold duplicates.
    favourites: Vec<Joke>,
    /// Whether `current` has been favourited since it was put on display.
    current_added_to_favourites: bool,
}

impl Jokes {
    /// The initial state: the placeholder joke and no favourites.
    pub fn new() -> Self {
        Self {
            current: Joke::placeholder(),
            favourites: Vec::new(),
            current_added_to_favourites: false,
        }
    }

    pub fn current(&self) -> &Joke {
        &self.current
    }

    pub fn favourites(&self) -> &[Joke] {
        &self.favourites
    }

    pub fn is_current_favourite(&self) -> bool {
        self.current_added_to_favourites
    }

    /// Puts a freshly fetched joke on display. The favourites are left alone.
    pub fn replace_current(&mut self, joke: Joke) {
        self.current = joke;
        self.current_added_to_favourites = false;
    }

    /// Appends the joke on display to the favourites, unless it was already
    /// added during this display cycle. Returns whether anything was added.
    ///
    /// Membership is tracked by the flag alone, so a joke that is fetched
    /// twice can end up in the list twice.
    pub fn add_current_to_favourites(&mut self) -> bool {
        if self.current_added_to_favourites {
            return false;
        }
        self.favourites.push(self.current.clone());
        self.current_added_to_favourites = true;
        true
    }
}

impl Default for Jokes {
    fn default() -> Self {
        Self::new()
    }
}
