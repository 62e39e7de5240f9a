mod geometry;
mod support;
