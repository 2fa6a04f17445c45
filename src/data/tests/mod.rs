mod act_image;
mod estimate;
mod item;
mod version;
mod view;
mod view_setting;
