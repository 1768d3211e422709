use nanvix_examples::extended;

program::entrypoint!(extended::run);
