//! FILENAME: app/src-tauri/src/main.rs
// PURPOSE: Desktop entry point.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() {
    browser_lib::run();
}
