/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod logbook;
pub mod profile;
pub mod progress;
pub mod reports;
pub mod requests;
pub mod storage;
pub mod students;
pub mod supervisors;
pub mod visits;
pub mod zones;

pub use client::ApiClient;
pub use error::ClientError;
