// Copyright (c) 2020-present, UMD Database Group.
//
// This program is free software: you can use, redistribute, and/or modify
// it under the terms of the GNU Affero General Public License, version 3
// or later ("AGPL"), as published by the Free Software Foundation.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or
// FITNESS FOR A PARTICULAR PURPOSE.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.

//! The entry point for the greeting function that sources the request
//! identifier from process-wide configuration.

use greeter::prelude::*;
use lambda_runtime::{service_fn, LambdaEvent};
use lazy_static::lazy_static;
use serde_json::Value;

lazy_static! {
    /// Per-process handler; immutable after construction.
    static ref GREETER: Greeter = Greeter::new(
        Box::new(EnvironmentProvider),
        RequestIdSource::Configuration,
        "Hello from Rust Lambda #1!",
    );
}

async fn handler(event: LambdaEvent<Value>) -> Result<Response> {
    let (payload, context) = event.into_parts();
    GREETER.handle(&payload, &context)
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    lambda_runtime::run(service_fn(handler)).await?;
    Ok(())
}
