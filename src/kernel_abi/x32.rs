//! x32 (ILP32 ABI on a 64-bit kernel) syscall number table.
//!
//! Mostly shares x86_64's numbering; syscalls whose native x86_64 form
//! passes pointers to LP64-shaped structs (siginfo_t, iovec, sigset_t,
//! ...) get a distinct number in the 512-547 range instead, per the
//! kernel's x32 syscall table. Process-State masks off the
//! `__X32_SYSCALL_BIT` before these numbers are looked up here.

use super::syscall_id::SyscallId;

pub const SLOTS: &[(u32, SyscallId)] = &[
    (0, SyscallId::Read),
    (1, SyscallId::Write),
    (2, SyscallId::Open),
    (3, SyscallId::Close),
    (4, SyscallId::Stat),
    (5, SyscallId::Fstat),
    (6, SyscallId::Lstat),
    (7, SyscallId::Poll),
    (8, SyscallId::Lseek),
    (9, SyscallId::Mmap),
    (10, SyscallId::Mprotect),
    (11, SyscallId::Munmap),
    (12, SyscallId::Brk),
    (14, SyscallId::RtSigprocmask),
    (17, SyscallId::Pread64),
    (18, SyscallId::Pwrite64),
    (21, SyscallId::Access),
    (22, SyscallId::Pipe),
    (23, SyscallId::Select),
    (24, SyscallId::SchedYield),
    (25, SyscallId::Mremap),
    (26, SyscallId::Msync),
    (27, SyscallId::Mincore),
    (28, SyscallId::Madvise),
    (29, SyscallId::Shmget),
    (30, SyscallId::Shmat),
    (31, SyscallId::Shmctl),
    (32, SyscallId::Dup),
    (33, SyscallId::Dup2),
    (34, SyscallId::Pause),
    (35, SyscallId::Nanosleep),
    (36, SyscallId::Getitimer),
    (37, SyscallId::Alarm),
    (38, SyscallId::Setitimer),
    (39, SyscallId::Getpid),
    (40, SyscallId::Sendfile),
    (41, SyscallId::Socket),
    (42, SyscallId::Connect),
    (43, SyscallId::Accept),
    (44, SyscallId::Sendto),
    (48, SyscallId::Shutdown),
    (49, SyscallId::Bind),
    (50, SyscallId::Listen),
    (51, SyscallId::Getsockname),
    (52, SyscallId::Getpeername),
    (53, SyscallId::Socketpair),
    (56, SyscallId::Clone),
    (57, SyscallId::Fork),
    (58, SyscallId::Vfork),
    (60, SyscallId::Exit),
    (61, SyscallId::Wait4),
    (62, SyscallId::Kill),
    (63, SyscallId::Uname),
    (64, SyscallId::Semget),
    (65, SyscallId::Semop),
    (66, SyscallId::Semctl),
    (67, SyscallId::Shmdt),
    (68, SyscallId::Msgget),
    (69, SyscallId::Msgsnd),
    (70, SyscallId::Msgrcv),
    (71, SyscallId::Msgctl),
    (72, SyscallId::Fcntl),
    (73, SyscallId::Flock),
    (74, SyscallId::Fsync),
    (75, SyscallId::Fdatasync),
    (76, SyscallId::Truncate),
    (77, SyscallId::Ftruncate),
    (78, SyscallId::Getdents),
    (79, SyscallId::Getcwd),
    (80, SyscallId::Chdir),
    (81, SyscallId::Fchdir),
    (82, SyscallId::Rename),
    (83, SyscallId::Mkdir),
    (84, SyscallId::Rmdir),
    (85, SyscallId::Creat),
    (86, SyscallId::Link),
    (87, SyscallId::Unlink),
    (88, SyscallId::Symlink),
    (89, SyscallId::Readlink),
    (90, SyscallId::Chmod),
    (91, SyscallId::Fchmod),
    (92, SyscallId::Chown),
    (93, SyscallId::Fchown),
    (94, SyscallId::Lchown),
    (95, SyscallId::Umask),
    (96, SyscallId::Gettimeofday),
    (97, SyscallId::Getrlimit),
    (98, SyscallId::Getrusage),
    (99, SyscallId::Sysinfo),
    (100, SyscallId::Times),
    (102, SyscallId::Getuid),
    (103, SyscallId::Syslog),
    (104, SyscallId::Getgid),
    (105, SyscallId::Setuid),
    (106, SyscallId::Setgid),
    (107, SyscallId::Geteuid),
    (108, SyscallId::Getegid),
    (109, SyscallId::Setpgid),
    (110, SyscallId::Getppid),
    (111, SyscallId::Getpgrp),
    (112, SyscallId::Setsid),
    (113, SyscallId::Setreuid),
    (114, SyscallId::Setregid),
    (115, SyscallId::Getgroups),
    (116, SyscallId::Setgroups),
    (117, SyscallId::Setresuid),
    (118, SyscallId::Getresuid),
    (119, SyscallId::Setresgid),
    (120, SyscallId::Getresgid),
    (121, SyscallId::Getpgid),
    (122, SyscallId::Setfsuid),
    (123, SyscallId::Setfsgid),
    (124, SyscallId::Getsid),
    (125, SyscallId::Capget),
    (126, SyscallId::Capset),
    (130, SyscallId::RtSigsuspend),
    (132, SyscallId::Utime),
    (133, SyscallId::Mknod),
    (134, SyscallId::Uselib),
    (135, SyscallId::Personality),
    (136, SyscallId::Ustat),
    (137, SyscallId::Statfs),
    (138, SyscallId::Fstatfs),
    (139, SyscallId::Sysfs),
    (140, SyscallId::Getpriority),
    (141, SyscallId::Setpriority),
    (142, SyscallId::SchedSetparam),
    (143, SyscallId::SchedGetparam),
    (144, SyscallId::SchedSetscheduler),
    (145, SyscallId::SchedGetscheduler),
    (146, SyscallId::SchedGetPriorityMax),
    (147, SyscallId::SchedGetPriorityMin),
    (148, SyscallId::SchedRrGetInterval),
    (149, SyscallId::Mlock),
    (150, SyscallId::Munlock),
    (151, SyscallId::Mlockall),
    (152, SyscallId::Munlockall),
    (153, SyscallId::Vhangup),
    (154, SyscallId::ModifyLdt),
    (155, SyscallId::PivotRoot),
    (156, SyscallId::Sysctl),
    (157, SyscallId::Prctl),
    (158, SyscallId::ArchPrctl),
    (159, SyscallId::Adjtimex),
    (160, SyscallId::Setrlimit),
    (161, SyscallId::Chroot),
    (162, SyscallId::Sync),
    (163, SyscallId::Acct),
    (164, SyscallId::Settimeofday),
    (165, SyscallId::Mount),
    (166, SyscallId::Umount2),
    (167, SyscallId::Swapon),
    (168, SyscallId::Swapoff),
    (169, SyscallId::Reboot),
    (170, SyscallId::Sethostname),
    (171, SyscallId::Setdomainname),
    (172, SyscallId::Iopl),
    (173, SyscallId::Ioperm),
    (174, SyscallId::CreateModule),
    (175, SyscallId::InitModule),
    (176, SyscallId::DeleteModule),
    (177, SyscallId::GetKernelSyms),
    (178, SyscallId::QueryModule),
    (179, SyscallId::Quotactl),
    (180, SyscallId::Nfsservctl),
    (181, SyscallId::Getpmsg),
    (182, SyscallId::Putpmsg),
    (183, SyscallId::AfsSyscall),
    (184, SyscallId::Tuxcall),
    (185, SyscallId::Security),
    (186, SyscallId::Gettid),
    (187, SyscallId::Readahead),
    (188, SyscallId::Setxattr),
    (189, SyscallId::Lsetxattr),
    (190, SyscallId::Fsetxattr),
    (191, SyscallId::Getxattr),
    (192, SyscallId::Lgetxattr),
    (193, SyscallId::Fgetxattr),
    (194, SyscallId::Listxattr),
    (195, SyscallId::Llistxattr),
    (196, SyscallId::Flistxattr),
    (197, SyscallId::Removexattr),
    (198, SyscallId::Lremovexattr),
    (199, SyscallId::Fremovexattr),
    (200, SyscallId::Tkill),
    (201, SyscallId::Time),
    (202, SyscallId::Futex),
    (203, SyscallId::SchedSetaffinity),
    (204, SyscallId::SchedGetaffinity),
    (205, SyscallId::SetThreadArea),
    (207, SyscallId::IoDestroy),
    (208, SyscallId::IoGetevents),
    (210, SyscallId::IoCancel),
    (211, SyscallId::GetThreadArea),
    (212, SyscallId::LookupDcookie),
    (213, SyscallId::EpollCreate),
    (214, SyscallId::EpollCtlOld),
    (215, SyscallId::EpollWaitOld),
    (216, SyscallId::RemapFilePages),
    (217, SyscallId::Getdents64),
    (218, SyscallId::SetTidAddress),
    (219, SyscallId::RestartSyscall),
    (220, SyscallId::Semtimedop),
    (221, SyscallId::Fadvise64),
    (223, SyscallId::TimerSettime),
    (224, SyscallId::TimerGettime),
    (225, SyscallId::TimerGetoverrun),
    (226, SyscallId::TimerDelete),
    (227, SyscallId::ClockSettime),
    (228, SyscallId::ClockGettime),
    (229, SyscallId::ClockGetres),
    (230, SyscallId::ClockNanosleep),
    (231, SyscallId::ExitGroup),
    (232, SyscallId::EpollWait),
    (233, SyscallId::EpollCtl),
    (234, SyscallId::Tgkill),
    (235, SyscallId::Utimes),
    (236, SyscallId::Vserver),
    (237, SyscallId::Mbind),
    (238, SyscallId::SetMempolicy),
    (239, SyscallId::GetMempolicy),
    (240, SyscallId::MqOpen),
    (241, SyscallId::MqUnlink),
    (242, SyscallId::MqTimedsend),
    (243, SyscallId::MqTimedreceive),
    (245, SyscallId::MqGetsetattr),
    (248, SyscallId::AddKey),
    (249, SyscallId::RequestKey),
    (250, SyscallId::Keyctl),
    (251, SyscallId::IoprioSet),
    (252, SyscallId::IoprioGet),
    (253, SyscallId::InotifyInit),
    (254, SyscallId::InotifyAddWatch),
    (255, SyscallId::InotifyRmWatch),
    (256, SyscallId::MigratePages),
    (257, SyscallId::Openat),
    (258, SyscallId::Mkdirat),
    (259, SyscallId::Mknodat),
    (260, SyscallId::Fchownat),
    (261, SyscallId::Futimesat),
    (262, SyscallId::Newfstatat),
    (263, SyscallId::Unlinkat),
    (264, SyscallId::Renameat),
    (265, SyscallId::Linkat),
    (266, SyscallId::Symlinkat),
    (267, SyscallId::Readlinkat),
    (268, SyscallId::Fchmodat),
    (269, SyscallId::Faccessat),
    (270, SyscallId::Pselect6),
    (271, SyscallId::Ppoll),
    (272, SyscallId::Unshare),
    (275, SyscallId::Splice),
    (276, SyscallId::Tee),
    (277, SyscallId::SyncFileRange),
    (280, SyscallId::Utimensat),
    (281, SyscallId::EpollPwait),
    (282, SyscallId::Signalfd),
    (283, SyscallId::TimerfdCreate),
    (284, SyscallId::Eventfd),
    (285, SyscallId::Fallocate),
    (286, SyscallId::TimerfdSettime),
    (287, SyscallId::TimerfdGettime),
    (288, SyscallId::Accept4),
    (289, SyscallId::Signalfd4),
    (290, SyscallId::Eventfd2),
    (291, SyscallId::EpollCreate1),
    (292, SyscallId::Dup3),
    (293, SyscallId::Pipe2),
    (294, SyscallId::InotifyInit1),
    (298, SyscallId::PerfEventOpen),
    (300, SyscallId::FanotifyInit),
    (301, SyscallId::FanotifyMark),
    (302, SyscallId::Prlimit64),
    (303, SyscallId::NameToHandleAt),
    (304, SyscallId::OpenByHandleAt),
    (305, SyscallId::ClockAdjtime),
    (306, SyscallId::Syncfs),
    (308, SyscallId::Setns),
    (309, SyscallId::Getcpu),
    (312, SyscallId::Kcmp),
    (313, SyscallId::FinitModule),
    (314, SyscallId::SchedSetattr),
    (315, SyscallId::SchedGetattr),
    (316, SyscallId::Renameat2),
    (317, SyscallId::Seccomp),
    (318, SyscallId::Getrandom),
    (319, SyscallId::MemfdCreate),
    (320, SyscallId::KexecFileLoad),
    (321, SyscallId::Bpf),
    (323, SyscallId::Userfaultfd),
    (324, SyscallId::Membarrier),
    (325, SyscallId::Mlock2),
    (326, SyscallId::CopyFileRange),
    (329, SyscallId::PkeyMprotect),
    (330, SyscallId::PkeyAlloc),
    (331, SyscallId::PkeyFree),
    (332, SyscallId::Statx),
    (512, SyscallId::RtSigaction),
    (513, SyscallId::RtSigreturn),
    (514, SyscallId::Ioctl),
    (515, SyscallId::Readv),
    (516, SyscallId::Writev),
    (517, SyscallId::Recvfrom),
    (518, SyscallId::Sendmsg),
    (519, SyscallId::Recvmsg),
    (520, SyscallId::Execve),
    (521, SyscallId::Ptrace),
    (522, SyscallId::RtSigpending),
    (523, SyscallId::RtSigtimedwait),
    (524, SyscallId::RtSigqueueinfo),
    (525, SyscallId::Sigaltstack),
    (526, SyscallId::TimerCreate),
    (527, SyscallId::MqNotify),
    (528, SyscallId::KexecLoad),
    (529, SyscallId::Waitid),
    (530, SyscallId::SetRobustList),
    (531, SyscallId::GetRobustList),
    (532, SyscallId::Vmsplice),
    (533, SyscallId::MovePages),
    (534, SyscallId::Preadv),
    (535, SyscallId::Pwritev),
    (536, SyscallId::RtTgsigqueueinfo),
    (537, SyscallId::Recvmmsg),
    (538, SyscallId::Sendmmsg),
    (539, SyscallId::ProcessVmReadv),
    (540, SyscallId::ProcessVmWritev),
    (541, SyscallId::Setsockopt),
    (542, SyscallId::Getsockopt),
    (543, SyscallId::IoSetup),
    (544, SyscallId::IoSubmit),
    (545, SyscallId::Execveat),
    (546, SyscallId::Preadv2),
    (547, SyscallId::Pwritev2),
];
