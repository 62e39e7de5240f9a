mod config;
mod embedded_assets;
