pub mod symbol_browser;
