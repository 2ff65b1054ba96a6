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

use clap::Parser;

use crate::app::server::ServerConfig;
use crate::app::server::start_server;
use crate::client::JokeClient;
use crate::error::Fallible;

#[derive(Parser, Debug, PartialEq)]
#[command(version, about, long_about = None)]
enum Command {
    /// Show a random joke in the browser, and collect favourites.
    Serve {
        /// The port to serve the joke screen on.
        #[arg(long, default_value_t = 8000)]
        port: u16,
        /// Fetch jokes from this URL instead of icanhazdadjoke.com.
        #[arg(long)]
        endpoint: Option<String>,
        /// Don't open the joke screen in the browser.
        #[arg(long)]
        no_browser: bool,
    },
    /// Fetch a single joke and print it as JSON.
    Fetch {
        /// Fetch the joke from this URL instead of icanhazdadjoke.com.
        #[arg(long)]
        endpoint: Option<String>,
    },
}

fn make_client(endpoint: Option<String>) -> Fallible<JokeClient> {
    match endpoint {
        Some(endpoint) => JokeClient::with_endpoint(&endpoint),
        None => JokeClient::new(),
    }
}

pub async fn entrypoint() -> Fallible<()> {
    let cli: Command = Command::parse();
    match cli {
        Command::Serve {
            port,
            endpoint,
            no_browser,
        } => {
            let config = ServerConfig {
                port,
                client: make_client(endpoint)?,
                open_browser: !no_browser,
            };
            start_server(config).await
        }
        Command::Fetch { endpoint } => {
            let client = make_client(endpoint)?;
            let joke = client.fetch_random_joke().await?;
            println!("{}", serde_json::to_string_pretty(&joke)?);
            Ok(())
        }
    }
}
