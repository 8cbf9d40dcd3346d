pub mod un_sdg;
