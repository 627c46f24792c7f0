mod array_ptr;
mod iter;
mod vector;


pub use array_ptr::ArrayPtr;
pub use iter::IntoIter;
pub use vector::SimpleVec;
