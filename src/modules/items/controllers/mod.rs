pub mod item_controller;
