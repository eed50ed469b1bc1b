pub mod prep;
