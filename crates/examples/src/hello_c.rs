use nanvix_examples::basic;

program::entrypoint!(basic::run);
