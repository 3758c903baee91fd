// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Walks a television through switching while off and after powering on.
//!
//! Run with `RUST_LOG=speaker_lib=debug` to see the library's log events.

use speaker_lib::{Speaker, Television};
use tracing_subscriber::EnvFilter;

fn main() -> speaker_lib::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut tv = Television::new("Some classy TV", 40.0)?;
    println!("{}", tv.model());
    println!("{}", tv.display_size());

    println!("{}", tv.switch_input_source("AV"));
    println!("{}", tv.input_source());
    println!("{}", tv.switch_channel(2));
    println!("{}", tv.channel());

    println!("{}", tv.turn_on());
    println!("{}", tv.switch_input_source("AV"));
    println!("{}", tv.input_source());
    println!("{}", tv.switch_channel(2));
    println!("{}", tv.channel());

    Ok(())
}
