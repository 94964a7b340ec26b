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

#![warn(missing_docs, clippy::needless_borrow)]

//! Greeter is the core of a pair of minimal example cloud functions: each
//! invocation receives an open-ended JSON event and an invocation context,
//! reads a couple of configuration values, and answers with a small JSON
//! response record.

pub mod config;
pub mod error;
pub mod handler;
pub mod prelude;
pub mod request_id;
pub mod response;
