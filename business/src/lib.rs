pub mod application {
    pub mod product {
        pub mod delete;
    }
    pub mod storage {
        pub mod delete_files;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod auth {
        pub mod errors;
        pub mod services;
    }
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod delete;
        }
    }
    pub mod shared {
        pub mod value_objects;
    }
    pub mod storage {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod delete_files;
        }
    }
}
