mod accounts;
mod cache;
mod container;
mod content;
mod courses;
mod helpers;
