// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartSize
// ABOUTME: Re-exports helper modules for smartsize-cli
// ABOUTME: Provides terminal rendering of measurements and recommendations

pub mod render;
