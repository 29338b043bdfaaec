pub mod shared {
    pub mod core {
        pub mod entity;
        pub mod errors;
    }
    pub mod application {
        pub mod entity_service;
    }
    pub mod infrastructure {
        pub mod entity_store;
    }
}

pub mod modules {
    pub mod candidates {
        pub mod core {
            pub mod candidate;
            pub mod fixtures;
        }
        pub mod adapters {
            pub mod outbound {
                pub mod candidate_store;
            }
        }
        pub mod use_cases {
            pub mod candidate_service;
        }
    }
    pub mod vacancies {
        pub mod core {
            pub mod fixtures;
            pub mod vacancy;
        }
        pub mod adapters {
            pub mod outbound {
                pub mod vacancy_store;
            }
        }
        pub mod use_cases {
            pub mod vacancy_service;
        }
    }
    pub mod cities {
        pub mod core {
            pub mod city;
            pub mod fixtures;
        }
        pub mod adapters {
            pub mod outbound {
                pub mod city_store;
            }
        }
        pub mod use_cases {
            pub mod city_service;
        }
    }
    pub mod files {
        pub mod core {
            pub mod file;
        }
        pub mod adapters {
            pub mod outbound {
                pub mod file_store;
            }
        }
        pub mod use_cases {
            pub mod file_service;
        }
    }
}

pub mod shell;
