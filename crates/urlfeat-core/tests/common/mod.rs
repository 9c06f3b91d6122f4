#![allow(dead_code)]

pub mod html_server;
