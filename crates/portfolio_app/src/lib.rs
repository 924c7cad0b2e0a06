//! Static-site generator and interactive front end for the portfolio.
pub mod app;
pub mod browse;
pub mod config;
pub mod effects;
pub mod logging;
pub mod site;
