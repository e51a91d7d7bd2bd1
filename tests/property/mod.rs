// Property tests module
