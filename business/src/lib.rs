pub mod application {
    pub mod matches {
        pub mod get_all;
        pub mod get_joined;
    }
    pub mod membership {
        pub mod get_status;
        pub mod join;
        pub mod leave;
        pub mod notifying_observer;
        pub mod store;
    }
    pub mod suggestion {
        pub mod generate;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod matches {
        pub mod errors;
        pub mod filter;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod get_all;
            pub mod get_joined;
        }
    }
    pub mod membership {
        pub mod model;
        pub mod notification;
        pub mod services;
        pub mod store;
        pub mod use_cases {
            pub mod get_status;
            pub mod join;
            pub mod leave;
        }
    }
    pub mod suggestion {
        pub mod errors;
        pub mod model;
        pub mod prompt;
        pub mod services;
        pub mod use_cases {
            pub mod generate;
        }
    }
}
