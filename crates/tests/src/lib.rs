#[cfg(test)]
mod common;

#[cfg(test)]
mod auth_tests;

#[cfg(test)]
mod job_order_list_tests;

#[cfg(test)]
mod job_order_get_tests;

#[cfg(test)]
mod customer_order_tests;

#[cfg(test)]
mod transport_tests;
