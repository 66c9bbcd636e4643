mod employee;
mod order;
mod project;
mod team;
mod user;
