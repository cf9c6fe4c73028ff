pub mod dataset_writer;
