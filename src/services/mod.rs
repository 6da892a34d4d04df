pub(crate) mod game_service;
pub(crate) mod lookup;
pub(crate) mod report;

#[cfg(test)]
pub(crate) mod fixtures;
