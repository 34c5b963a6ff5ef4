#[cfg(test)]
mod common;

#[cfg(test)]
mod access_guard_tests;

#[cfg(test)]
mod return_path_tests;

#[cfg(test)]
mod navigation_tests;

#[cfg(test)]
mod authenticator_tests;

#[cfg(test)]
mod config_tests;
