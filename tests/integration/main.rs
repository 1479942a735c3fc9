//! Integration tests for lmpmap

mod cli_test;
mod dataset_test;
mod helpers;
mod playback_test;
mod render_test;
