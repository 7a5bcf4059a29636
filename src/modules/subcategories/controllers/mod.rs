pub mod sub_category_controller;
