// UI reader component - annotated document rendering with ratatui
pub mod view;
