mod layouts;
mod random;
mod streams;
