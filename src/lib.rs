pub mod shared {
    pub mod core {
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod sales_store;
    }
}

pub mod modules {
    pub mod sales {
        pub mod core {
            pub mod descriptor;
            pub mod identity;
            pub mod records;
            pub mod rows;
            pub mod summary;
            pub mod text;
        }
        pub mod use_cases {
            pub mod redact_rows {
                pub mod redact;
            }
            pub mod build_product_table {
                pub mod build;
                pub mod key_policy;
            }
            pub mod build_branch_table {
                pub mod build;
            }
            pub mod normalize_orders {
                pub mod normalize;
            }
            pub mod run_pipeline {
                pub mod handler;
                pub mod options;
            }
            pub mod load_tables {
                pub mod handler;
            }
        }
    }
}
