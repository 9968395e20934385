pub mod u508_save_query;
