pub mod modules {
    pub mod registrations {
        pub mod core {
            pub mod outcome;
            pub mod ports;
            pub mod registration_request;
        }
        pub mod use_cases {
            pub mod send_registration_batch {
                pub mod command;
                pub mod handler;
                pub mod report;
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod http_transport;
                pub mod in_memory_transport;
            }
        }
    }
}

pub mod shell;
