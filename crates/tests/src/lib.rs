#[cfg(test)]
mod common;

#[cfg(test)]
mod health_tests;

#[cfg(test)]
mod parcel_forward_tests;

#[cfg(test)]
mod parcel_error_tests;
