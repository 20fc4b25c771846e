pub mod application {
    pub mod shopping_list {
        pub mod add_items;
        pub mod create;
        pub mod delete;
        pub mod delete_item;
        pub mod edit_item;
        pub mod get_all;
        pub mod get_by_id;
        pub mod get_user_lists;
        pub mod reset;
        pub mod update;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod shopping_list {
        pub mod errors;
        pub mod factory;
        pub mod model;
        pub mod ownership;
        pub mod repository;
        pub mod use_cases {
            pub mod add_items;
            pub mod create;
            pub mod delete;
            pub mod delete_item;
            pub mod edit_item;
            pub mod get_all;
            pub mod get_by_id;
            pub mod get_user_lists;
            pub mod reset;
            pub mod update;
        }
    }
}
