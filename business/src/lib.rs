pub mod application {
    pub mod cart {
        pub mod add_product;
        pub mod clear;
        pub mod create;
        pub mod get_by_id;
        pub mod remove_product;
        pub mod replace_products;
        pub mod update_quantity;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod cart {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod add_product;
            pub mod clear;
            pub mod create;
            pub mod get_by_id;
            pub mod remove_product;
            pub mod replace_products;
            pub mod update_quantity;
        }
    }
    pub mod product {
        pub mod repository;
    }
}
