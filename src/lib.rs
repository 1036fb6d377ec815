pub mod shared {
    pub mod http {
        pub mod envelope;
    }
    pub mod infrastructure {
        pub mod notifier;
        pub mod row_store;
    }
}

pub mod modules {
    pub mod registrations {
        pub mod core {
            pub mod attendees;
            pub mod calendar;
            pub mod registration;
            pub mod statistics;
        }
        pub mod use_cases {
            pub mod register_attendance {
                pub mod command;
                pub mod confirmation;
                pub mod handler;
                pub mod submission;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_statistics {
                pub mod aggregate;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
