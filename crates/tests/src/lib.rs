

#[cfg(test)]
mod dashboard_session_tests;

#[cfg(test)]
mod dropdown_tests;

#[cfg(test)]
mod logout_tests;

#[cfg(test)]
mod unmount_tests;
