mod act;
mod version;
mod view;
