pub mod xlsx_io;
