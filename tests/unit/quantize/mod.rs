mod median_cut;
