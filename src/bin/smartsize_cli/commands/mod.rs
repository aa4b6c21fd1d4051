// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartSize
// ABOUTME: Re-exports command modules for smartsize-cli
// ABOUTME: One module per subcommand

pub mod analyze;
pub mod classify;
pub mod convert;
pub mod recommend;
