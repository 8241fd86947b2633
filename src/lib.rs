//! Workspace-level integration tests for the MatBench crates live under
//! `tests/`; this stub library only anchors the test package.
