/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::time::Duration;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

pub const SPINNER_CHARACTERS: &str = "-\\|/x";
const TICK_INTERVAL: Duration = Duration::from_millis(100);

pub fn request_spinner_style() -> ProgressStyle {
    ProgressStyle::with_template("[{spinner}] {msg} [{elapsed_precise}]")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_chars(SPINNER_CHARACTERS)
}

/// A spinner on stderr shown while a request is in flight,
/// so that stdout only carries the response body.
pub fn request_spinner<S: Into<String>>(message: S) -> ProgressBar {
    let spinner = ProgressBar::with_draw_target(None, ProgressDrawTarget::stderr())
        .with_style(request_spinner_style())
        .with_message(message.into());
    spinner.enable_steady_tick(TICK_INTERVAL);
    spinner
}
