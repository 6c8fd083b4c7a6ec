mod session;
mod status;
mod suggestion;
