pub mod client;
pub mod csv;
pub mod cyrillic;
pub mod folders;
pub mod utils;

pub use client::TestDataClient;
pub use self::csv::{read_csv_file, read_csv_file_default, read_csv_file_with_config};
pub use folders::Folder;
pub use utils::{
    process_data, process_data_for_files, search_text, updated_form_file,
    updated_form_file_with_technical_name, ProcessData,
};
